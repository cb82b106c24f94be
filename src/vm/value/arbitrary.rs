use super::{Value, FALSE, NULL, TRUE};

use quickcheck::{Arbitrary, Gen};

impl Arbitrary for Value {
    fn arbitrary(gen: &mut Gen) -> Self {
        match gen.choose(&[1, 2, 3]) {
            Some(1) => Value::Integer(i64::arbitrary(gen)),
            Some(2) if bool::arbitrary(gen) => TRUE,
            Some(2) => FALSE,
            _ => NULL,
        }
    }
}
