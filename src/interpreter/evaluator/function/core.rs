use crate::{
    ast::Builtin,
    interpreter::evaluator::{
        function::{arithmetic, comparison, control, list, math},
        scope::GlobalScope,
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the arity it is registered under,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table installed into every default scope),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "eq"     => { arity: 2, func: comparison::eq },
    "le"     => { arity: 2, func: comparison::le },
    "nand"   => { arity: 2, func: comparison::nand },
    "length" => { arity: 1, func: list::length },
    "head"   => { arity: 1, func: list::head },
    "tail"   => { arity: 1, func: list::tail },
    "map"    => { arity: 2, func: |scope| list::map_filter("map", scope) },
    "filter" => { arity: 2, func: |scope| list::map_filter("filter", scope) },
    "if"     => { arity: 3, func: control::if_then_else },
    "add"    => { arity: 2, func: arithmetic::add },
    "sub"    => { arity: 2, func: arithmetic::sub },
    "mul"    => { arity: 2, func: arithmetic::mul },
    "div"    => { arity: 2, func: arithmetic::div },
    "pow"    => { arity: 2, func: arithmetic::pow },
    "sqrt"   => { arity: 1, func: math::sqrt },
    "sin"    => { arity: 1, func: math::sin },
    "cos"    => { arity: 1, func: math::cos },
}

/// Registers every entry of [`BUILTIN_TABLE`] in `globals`.
///
/// Built-ins are ordinary table entries afterwards: a user definition with
/// the same name and arity replaces them.
pub fn install_default_library(globals: &GlobalScope) {
    for builtin in BUILTIN_TABLE {
        globals.add_builtin(*builtin);
    }
    log::debug!("installed built-ins: {}", BUILTIN_FUNCTIONS.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_installed_under_its_arity() {
        let globals = GlobalScope::with_default_library();

        for builtin in BUILTIN_TABLE {
            assert!(globals.is_defined(builtin.name, builtin.arity), "{builtin:?}");
        }
        assert_eq!(globals.signatures().len(), BUILTIN_FUNCTIONS.len());
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names = BUILTIN_FUNCTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }
}
