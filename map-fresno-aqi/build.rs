use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("readings.csv.gz");

    // Gzip the hourly readings into OUT_DIR for include_bytes.
    //
    // The full 1999-2025 file is tens of MB of repetitive text; compressed it
    // is a fraction of that in the WASM binary. When the fixture is missing
    // an empty payload is embedded and the page reports the load failure.
    let src = Path::new("../fixtures/fresno_pm25_hourly_with_aqi_and_category.csv");
    let csv = if src.exists() {
        fs::read(src).unwrap()
    } else {
        println!("cargo:warning=fixtures/fresno_pm25_hourly_with_aqi_and_category.csv not found; embedding empty dataset");
        Vec::new()
    };

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&csv).unwrap();
    fs::write(&dest, encoder.finish().unwrap()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/fresno_pm25_hourly_with_aqi_and_category.csv");
}
