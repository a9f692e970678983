//! Writes a small deterministic bank-marketing CSV so the dashboard can be
//! tried without the real dataset: `cargo run --bin generate_sample`.

use anyhow::{Context, Result};

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

    fn pick<'a>(&mut self, options: &'a [&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const JOBS: &[&str] = &[
    "admin.",
    "blue-collar",
    "entrepreneur",
    "housemaid",
    "management",
    "retired",
    "self-employed",
    "services",
    "student",
    "technician",
    "unemployed",
];
const MARITAL: &[&str] = &["divorced", "married", "single"];
const EDUCATION: &[&str] = &[
    "basic.4y",
    "basic.6y",
    "basic.9y",
    "high.school",
    "professional.course",
    "university.degree",
];
const CONTACT: &[&str] = &["cellular", "telephone"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "bank-sample.csv";

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "age", "job", "marital", "education", "contact", "duration", "campaign", "y",
    ])?;

    let rows = 2000;
    for _ in 0..rows {
        let age = rng.gauss(40.0, 10.0).round().clamp(18.0, 95.0) as i64;
        let job = rng.pick(JOBS);
        let marital = rng.pick(MARITAL);
        let education = rng.pick(EDUCATION);
        let contact = rng.pick(CONTACT);
        let duration = (rng.next_f64() * 1200.0) as i64;
        let campaign = 1 + (rng.next_u64() % 6) as i64;

        // Longer calls convert more often, so duration correlates with y.
        let converted = rng.next_f64() < 0.05 + duration as f64 / 4000.0;

        writer.write_record([
            age.to_string(),
            job.to_string(),
            marital.to_string(),
            education.to_string(),
            contact.to_string(),
            duration.to_string(),
            campaign.to_string(),
            (if converted { "yes" } else { "no" }).to_string(),
        ])?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} records to {output_path}");
    Ok(())
}
