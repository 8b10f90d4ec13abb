mod auth;
mod favorite;
mod recipe;
mod shopping_cart;
mod shopping_list;
mod user;
