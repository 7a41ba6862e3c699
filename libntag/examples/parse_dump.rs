// Decode NDEF records from a saved memory image
//
// The dump is the data area read from page 4 onwards, as hex text. Whitespace
// and line breaks are ignored, so the output of most reader tools can be used
// directly:
//
//   RUST_LOG=debug cargo run --example parse_dump -- tag.hex

use anyhow::{Context, bail};
use libntag::prelude::*;
use libntag::tlv;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => bail!("usage: parse_dump <hex dump file>"),
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let image = parse_hex(&text).map_err(anyhow::Error::msg)?;
    println!("Image: {} bytes", image.len());

    let blocks = tlv::parse(&image)?;
    println!("NDEF message TLVs: {}", blocks.len());
    for (i, b) in blocks.iter().enumerate() {
        println!("  [{}] {} bytes: {}", i, b.len(), bytes_to_hex_spaced(b));
    }

    let records = NdefCodec.decode(&blocks.concat())?;
    if records.is_empty() {
        println!("No NDEF records");
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        if let Some(text) = record.text() {
            println!("Record {}: Text [{}] {}", i + 1, text.language, text.text);
        } else if let Some(uri) = record.uri() {
            println!("Record {}: URI {}", i + 1, uri);
        } else {
            println!(
                "Record {}: {:?} type={} payload={}",
                i + 1,
                record.tnf,
                String::from_utf8_lossy(&record.record_type),
                bytes_to_hex(&record.payload)
            );
        }
    }
    Ok(())
}
