mod drink;
mod ingredient;
mod shopping_list;

pub use drink::{Drink, RawDrink, SearchResponse};
pub use ingredient::Ingredient;
pub use shopping_list::ShoppingList;
