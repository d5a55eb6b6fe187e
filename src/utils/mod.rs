mod border_color;
pub use border_color::*;

mod colors;
pub use colors::*;

mod element_id;
pub use element_id::*;

mod pixels;
pub use pixels::*;

mod transitions;
pub use transitions::*;
