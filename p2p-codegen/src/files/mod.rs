mod module_impl;
mod module_interface;
mod private_pch;

pub use module_impl::ModuleImpl;
pub use module_interface::ModuleInterface;
pub use private_pch::{PrivatePch, pch_file_name, pch_include_line};
