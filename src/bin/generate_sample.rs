//! Writes a deterministic demo dataset to `spacex_launch_dash.csv`.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (category, first flight using it, success probability)
const BOOSTERS: [(&str, u32, f64); 5] = [
    ("v1.0", 1, 0.35),
    ("v1.1", 6, 0.45),
    ("FT", 21, 0.75),
    ("B4", 40, 0.80),
    ("B5", 48, 0.95),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

const FLIGHTS: u32 = 56;
const MAX_PAYLOAD_KG: f64 = 9600.0;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for flight_number in 1..=FLIGHTS {
        let (category, _, p_success) = BOOSTERS
            .iter()
            .rev()
            .find(|(_, first, _)| flight_number >= *first)
            .copied()
            .unwrap_or(BOOSTERS[0]);

        let launch_site = *rng.pick(&SITES);
        // Early flights carried light demo payloads.
        let payload = if flight_number <= 2 {
            0.0
        } else {
            (rng.next_f64() * MAX_PAYLOAD_KG).round()
        };
        let class = u8::from(rng.next_f64() < p_success);

        writer
            .serialize(Row {
                flight_number,
                launch_site,
                class,
                payload_mass_kg: payload,
                booster_version: format!("F9 {category} B{:04}", 1000 + flight_number),
                booster_version_category: category,
            })
            .with_context(|| format!("writing flight {flight_number}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {FLIGHTS} launches to {output_path}");
    Ok(())
}
