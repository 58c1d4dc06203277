//! NDJSON output for `--json`
//!
//! Every command writes exactly one object with an `event` key. Registry
//! values are emitted as stored, catalog prices as numbers.

use std::io::{self, Write};

use serde_json::{json, Value};

use roster::{BandMember, Musician, Product};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn product(product: &Product) -> Value {
    json!(product)
}

pub fn products<'a>(items: impl IntoIterator<Item = &'a Product>) -> Value {
    Value::Array(items.into_iter().map(product).collect())
}

pub fn musician(musician: &Musician) -> Value {
    json!(musician)
}

pub fn musicians<'a>(items: impl IntoIterator<Item = &'a Musician>) -> Value {
    Value::Array(items.into_iter().map(musician).collect())
}

pub fn bands(bands: &[Vec<BandMember>]) -> Value {
    Value::Array(
        bands
            .iter()
            .map(|band| {
                Value::Array(
                    band.iter()
                        .map(|member| {
                            json!({
                                "instrument": member.instrument,
                                "musician": musician(&member.musician),
                            })
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{Price, ProductId};

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &json!({"event": "categories", "categories": ["a"]})).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn product_keeps_data_file_keys() {
        let p = Product::new(ProductId::Number(7), "livros", Price::new(12.5).unwrap());
        assert_eq!(product(&p), json!({"id": 7, "categoria": "livros", "preco": 12.5}));
    }

    #[test]
    fn musician_keeps_registry_keys() {
        let ana = Musician::new("ANA", "ANA@X", vec!["ROCK".into()], vec!["VOCAL".into()]);
        assert_eq!(
            musician(&ana),
            json!({
                "nome": "ANA",
                "email": "ANA@X",
                "generos_musicais": ["ROCK"],
                "instrumentos": ["VOCAL"],
            })
        );
    }

    #[test]
    fn bands_nest_members_in_slot_order() {
        let ana = Musician::new("ANA", "ANA@X", vec!["ROCK".into()], vec!["VOCAL".into()]);
        let value = bands(&[vec![BandMember {
            instrument: "VOCAL".to_string(),
            musician: ana,
        }]]);
        assert_eq!(value[0][0]["instrument"], "VOCAL");
        assert_eq!(value[0][0]["musician"]["email"], "ANA@X");
    }
}
