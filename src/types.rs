use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;

macro_rules! impl_primitive_num {
    (pub struct $outer:ident($tname:ty)) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Serialize,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deserialize,
            Shrinkwrap,
        )]
        pub struct $outer(pub $tname);

        impl std::fmt::Display for $outer {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $outer {
            type Err = <$tname as std::str::FromStr>::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map($outer)
            }
        }
    };
}

impl_primitive_num!(pub struct Confirmations(usize));
impl_primitive_num!(pub struct PollIntervalMs(u64));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let confirmations: Confirmations = "3".parse().unwrap();

        assert_eq!(confirmations, Confirmations(3));
        assert_eq!(confirmations.to_string(), "3");
    }

    #[test]
    fn rejects_garbage() {
        assert!("three".parse::<Confirmations>().is_err());
        assert!("-1".parse::<PollIntervalMs>().is_err());
    }
}
