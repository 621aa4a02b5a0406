use anyhow::{Context, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const REGIONS: [&str; 3] = ["North", "South", "West"];

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

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_sales.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["month", "revenue", "profit", "orders", "region"])?;

    // Revenue trends upward through the year with noise.
    let mut rows = 0;
    for (i, month) in MONTHS.iter().enumerate() {
        let revenue = (2000.0 + 350.0 * i as f64 + rng.range(-600.0, 600.0)).round();
        let profit = (revenue * rng.range(0.3, 0.9)).round();
        let orders = (revenue / rng.range(20.0, 40.0)).round();
        let region = REGIONS[i % REGIONS.len()];

        writer.write_record([
            month.to_string(),
            revenue.to_string(),
            profit.to_string(),
            orders.to_string(),
            region.to_string(),
        ])?;
        rows += 1;
    }
    writer.flush().context("flushing sample CSV")?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
