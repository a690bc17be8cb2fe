//! The `list-modules` command.

use lintweave_modules::module_names;

/// Prints the built-in module names in execution order.
pub fn run() {
    for (index, name) in module_names().iter().enumerate() {
        println!("{:2}. {name}", index + 1);
    }
}
