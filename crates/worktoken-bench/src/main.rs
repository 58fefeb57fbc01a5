//! Benchmark for worktoken encode/decode over growing payloads.
//!
//! Base-62 conversion is quadratic in payload size, so time per byte should
//! climb with each step. Pass `--json` for machine-readable results.

use std::time::{Duration, Instant};

use serde::Serialize;
use worktoken::codec::{base62, rle, serialize_envelope};
use worktoken::{ContentType, Envelope, Metadata};

/// Payload sizes in bytes.
const SIZES: [usize; 5] = [1_024, 4_096, 16_384, 65_536, 131_072];

const ITERS: u32 = 5;

#[derive(Debug, Serialize)]
struct Sample {
    kind: &'static str,
    payload_bytes: usize,
    serialized_bytes: usize,
    compressed_bytes: usize,
    token_chars: usize,
    encode_micros: u128,
    decode_micros: u128,
}

/// Indented, repetitive source code: the case the compressor targets.
fn indented_code(size: usize) -> String {
    let block = "impl Widget {\n    pub fn render(&self) {\n        if self.visible {\n            draw(self);\n        }\n    }\n}\n\n";
    block.repeat(size / block.len() + 1)[..size].to_string()
}

/// Low-repetition text from a small xorshift generator.
fn prose(size: usize) -> String {
    let mut state: u32 = 0x9E37_79B9;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let c = b'a' + (state % 27) as u8;
            if c > b'z' { ' ' } else { c as char }
        })
        .collect()
}

fn time<T>(mut f: impl FnMut() -> T) -> (T, Duration) {
    let _ = f();
    let start = Instant::now();
    let mut last = f();
    for _ in 1..ITERS {
        last = f();
    }
    (last, start.elapsed() / ITERS)
}

fn run(kind: &'static str, content: &str, content_type: ContentType) -> Sample {
    let meta = if content_type == ContentType::Code {
        Metadata::code("rust", 1_700_000_000_000)
    } else {
        Metadata::new(content_type, 1_700_000_000_000)
    };

    let serialized = serialize_envelope(&Envelope::new(meta.clone(), content))
        .expect("Failed to serialize");
    let compressed = rle::compress(serialized.as_bytes());

    let (token, encode_time) = time(|| worktoken::encode(content, &meta).expect("Failed to encode"));
    let (decoded, decode_time) =
        time(|| worktoken::decode_token(&token).expect("Failed to decode"));
    assert_eq!(decoded.content, content);
    assert!(token.ends_with(&base62::encode(&compressed)));

    Sample {
        kind,
        payload_bytes: content.len(),
        serialized_bytes: serialized.len(),
        compressed_bytes: compressed.len(),
        token_chars: token.len(),
        encode_micros: encode_time.as_micros(),
        decode_micros: decode_time.as_micros(),
    }
}

fn main() {
    let json = std::env::args().any(|a| a == "--json");

    let mut samples = Vec::new();
    for size in SIZES {
        samples.push(run("code", &indented_code(size), ContentType::Code));
        samples.push(run("prose", &prose(size), ContentType::Text));
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&samples).expect("Failed to serialize results")
        );
        return;
    }

    println!("=== worktoken encode/decode ({} iterations each) ===", ITERS);
    for s in &samples {
        println!(
            "\n{} {} bytes -> {} token chars",
            s.kind, s.payload_bytes, s.token_chars
        );
        println!(
            "  Compression: {} -> {} bytes ({:.1}%)",
            s.serialized_bytes,
            s.compressed_bytes,
            100.0 * s.compressed_bytes as f64 / s.serialized_bytes as f64
        );
        println!(
            "  Encode: {} µs ({:.3} µs/byte)",
            s.encode_micros,
            s.encode_micros as f64 / s.payload_bytes as f64
        );
        println!(
            "  Decode: {} µs ({:.3} µs/byte)",
            s.decode_micros,
            s.decode_micros as f64 / s.payload_bytes as f64
        );
    }
}
