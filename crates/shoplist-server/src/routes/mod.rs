pub mod health;
pub mod shopping_list;
