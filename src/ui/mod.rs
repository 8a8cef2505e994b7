// Travel wishlist text UI
// Renders destination cards for the terminal.

pub mod card;
