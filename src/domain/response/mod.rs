mod message;
mod order;
mod product;
mod user;

pub use self::message::MessageResponse;
pub use self::order::OrderResponse;
pub use self::product::ProductResponse;
pub use self::user::UserResponse;
