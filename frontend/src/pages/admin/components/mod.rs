pub mod create_module;
