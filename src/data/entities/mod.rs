pub mod banner;
pub mod contact;
pub mod customer;
pub mod dashboard;
pub mod food;
pub mod transaction;

pub use banner::{Banner, MoveDirection, NewBanner};
pub use contact::{
    BusinessDay, BusinessHours, ContactEdit, ContactInfo, SocialMedia, SocialPlatform,
};
pub use customer::Customer;
pub use dashboard::{RecentOrder, SalesPoint, StatCard, TopSellingItem};
pub use food::{FoodItem, FoodOption, FoodStatus, FoodTopping, FoodVariant, NewFood};
pub use transaction::{LineItem, Transaction, TransactionStatus};
