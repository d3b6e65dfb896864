pub mod expense;
pub mod session;
pub mod system;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    expense::register(registry);
    view::register(registry);
    session::register(registry);
    system::register(registry);
}
