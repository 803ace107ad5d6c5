mod order;
mod product;
mod user;

pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::user::{CreateUserRequest, UpdateUserRequest};
