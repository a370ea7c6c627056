use std::fmt::Display;

macro_rules! decl_clamped_float {
    {$(#[$meta:meta])* $name:ident($base:ty) in $min:literal..$max:literal step $step:literal} => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
        pub struct $name($base);

        impl $name {
            /// The smallest accepted value.
            pub const MIN: $base = $min;
            /// The largest accepted value.
            pub const MAX: $base = $max;
            /// The granularity of accepted values.
            pub const STEP: $base = $step;

            /// Clamps the given value to the interval
            #[doc = concat!("[", stringify!($min), ", ", stringify!($max), "],")]
            /// rounds it to the nearest step, and constructs a new instance from it. NaN is
            /// replaced with the default value of 1.0.
            pub fn new(value: $base) -> Self {
                if value.is_nan() {
                    return Self::default();
                }
                let per_unit = ((1.0 as $base) / $step).round();
                let steps = (value.clamp($min, $max) * per_unit).round();
                Self((steps / per_unit).clamp($min, $max))
            }

            /// Returns the value encapsulated by this instance.
            pub fn value(&self) -> $base {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(1.0)
            }
        }

        impl From<$base> for $name {
            fn from(source: $base) -> Self {
                Self::new(source)
            }
        }

        impl From<$name> for $base {
            fn from(source: $name) -> Self {
                source.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.1}", self.0)
            }
        }
    };
}

decl_clamped_float! {
    /// Voice pitch, represented as a value in the interval [0.5, 2.0], with 1.0 being normal pitch.
    Pitch(f32) in 0.5..2.0 step 0.1
}

decl_clamped_float! {
    /// Speech rate, represented as a value in the interval [0.5, 2.0], with 1.0 being normal speed.
    Rate(f32) in 0.5..2.0 step 0.1
}
