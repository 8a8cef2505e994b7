// Travel wishlist state managers
// Managers handle stateful operations: the destination store and the wishlist view.

pub mod destination_manager;
pub mod wishlist_view;
