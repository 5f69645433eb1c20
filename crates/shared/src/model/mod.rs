mod click;
pub use click::*;

mod notification;
pub use notification::*;

mod push_payload;
pub use push_payload::*;
