pub mod edit_module;
pub mod module_card;
