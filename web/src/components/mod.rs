pub mod delete_account_modal;
pub mod ingredients_panel;
pub mod loading;
pub mod pagination_controls;
pub mod profile_panel;
pub mod recipe_card;
pub mod recipe_collections;
pub mod recommended_recipes;
pub mod side_menu;
