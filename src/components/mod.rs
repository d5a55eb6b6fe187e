mod button;
pub use button::*;

mod feature_card;
pub use feature_card::*;

mod icon;
pub use icon::*;

mod nav_bar;
pub use nav_bar::*;
