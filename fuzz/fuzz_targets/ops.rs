#![no_main]

use libfuzzer_sys::fuzz_target;
use listdict::{Dict, List, Value};

fn value_from(byte: u8) -> Value {
    match byte % 5 {
        0 => Value::None,
        1 => Value::from(i64::from(byte)),
        2 => Value::from(f64::from(byte) / 4.0),
        3 => Value::from(format!("s{}", byte % 7)),
        _ => Value::from(byte % 2 == 0),
    }
}

fuzz_target!(|data: &[u8]| {
    // Each pair of bytes is (opcode, operand). Operations must never panic, and failed ones must not change length.
    let mut list = List::new();
    let mut dict = Dict::new();

    for chunk in data.chunks_exact(2) {
        let (op, arg) = (chunk[0], chunk[1]);
        let index = i64::from(arg as i8);
        let before = list.len();
        let ok = match op % 12 {
            0 => {
                list.push(value_from(arg));
                true
            }
            1 => list.delete(index).is_ok(),
            2 => list.insert(index, value_from(arg)).is_ok(),
            3 => list.pop().is_ok(),
            4 => list.pop_item(index).is_ok(),
            5 => list.remove(&value_from(arg)).is_ok(),
            6 => {
                list.sort();
                true
            }
            7 => {
                list.reverse();
                true
            }
            8 => {
                dict.set_default(&format!("k{}", arg % 8), value_from(arg));
                true
            }
            9 => {
                let _ = dict.pop(&format!("k{}", arg % 8), Value::None);
                true
            }
            10 => {
                let _ = dict.pop_item();
                true
            }
            _ => {
                list.extend(&dict.values());
                true
            }
        };
        if !ok {
            assert_eq!(list.len(), before);
        }
    }

    let _ = list.to_string();
    let _ = dict.to_string();
});
