//! Macros for declaring typed node sets.

/// Generate an enum and its [`NodeSet`](crate::core::NodeSet) implementation.
///
/// Each variant registers under its own identifier unless a string label
/// is given with `= "label"`.
///
/// # Example
///
/// ```
/// use exclusive_state::core::NodeSet;
/// use exclusive_state::node_set;
///
/// node_set! {
///     pub enum Locomotion {
///         Idle,
///         Run,
///         Jump = "Airborne.Jump",
///     }
/// }
///
/// assert_eq!(Locomotion::Run.name(), "Run");
/// assert_eq!(Locomotion::Jump.name(), "Airborne.Jump");
/// assert_eq!(Locomotion::all().len(), 3);
/// ```
#[macro_export]
macro_rules! node_set {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::NodeSet for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::node_set!(@label $variant $($label)?)),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}
