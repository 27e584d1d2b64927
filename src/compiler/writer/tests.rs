use num_bigint::BigUint;
use super::*;

fn write(value: &Value) -> String {
    let mut out = Vec::new();
    TomlWriter::new().write_document(value, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn integer(value: u64) -> Value {
    Value::Integer(BigUint::from(value))
}

fn table(fields: Vec<(&str, Value)>) -> Value {
    Value::Table(fields.into_iter().map(|(name, field)| (name.to_owned(), field)).collect())
}

mod root {
    use super::*;

    #[test]
    pub fn test_integer_root() {
        assert_eq!("value = 255\n", write(&integer(255)));
    }

    #[test]
    pub fn test_array_root() {
        assert_eq!("value = [1, 2, 3]\n", write(&Value::Array(vec![integer(1), integer(2), integer(3)])));
        assert_eq!("value = []\n", write(&Value::Array(vec![])));
    }

    #[test]
    pub fn test_table_root_keeps_key_order() {
        assert_eq!("b = 2\na = 1\n", write(&table(vec![("b", integer(2)), ("a", integer(1))])));
    }

    #[test]
    pub fn test_empty_table_root_writes_nothing() {
        assert_eq!("", write(&table(vec![])));
    }

    #[test]
    pub fn test_nested_table_is_inline() {
        let value = table(vec![
            ("server", table(vec![("port", integer(8080)), ("limits", table(vec![("max", integer(16))]))])),
            ("empty", table(vec![])),
        ]);

        assert_eq!("server = { port = 8080, limits = { max = 16 } }\nempty = {  }\n", write(&value));
    }
}

mod elements {
    use super::*;

    #[test]
    pub fn test_array_of_inline_tables() {
        let value = Value::Array(vec![table(vec![("a", integer(1))]), Value::Array(vec![])]);

        assert_eq!("value = [{ a = 1 }, []]\n", write(&value));
    }

    #[test]
    pub fn test_large_integer_is_decimal() {
        let value = Value::Integer(BigUint::parse_bytes(b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", 16).unwrap());

        assert_eq!("value = 340282366920938463463374607431768211455\n", write(&value));
    }

    #[test]
    pub fn test_non_bare_key_is_quoted() {
        assert_eq!("\"ключ\" = { \"значение\" = 1, k2 = 2 }\n",
                   write(&table(vec![("ключ", table(vec![("значение", integer(1)), ("k2", integer(2))]))])));
    }
}
