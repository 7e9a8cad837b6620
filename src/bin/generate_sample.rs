use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Logistic growth curve: cumulative cases after `t` days.
fn logistic(t: f64, capacity: f64, rate: f64, midpoint: f64) -> f64 {
    capacity / (1.0 + (-rate * (t - midpoint)).exp())
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
}

struct StateProfile {
    name: &'static str,
    fips: &'static str,
    first_day: i64,
    capacity: f64,
    rate: f64,
    midpoint: f64,
    fatality: f64,
}

const STATES: [StateProfile; 4] = [
    StateProfile {
        name: "Washington",
        fips: "53",
        first_day: 0,
        capacity: 60_000.0,
        rate: 0.06,
        midpoint: 90.0,
        fatality: 0.03,
    },
    StateProfile {
        name: "New York",
        fips: "36",
        first_day: 40,
        capacity: 420_000.0,
        rate: 0.11,
        midpoint: 85.0,
        fatality: 0.07,
    },
    StateProfile {
        name: "Virginia",
        fips: "51",
        first_day: 46,
        capacity: 120_000.0,
        rate: 0.05,
        midpoint: 120.0,
        fatality: 0.025,
    },
    StateProfile {
        name: "Ohio",
        fips: "39",
        first_day: 49,
        capacity: 110_000.0,
        rate: 0.05,
        midpoint: 125.0,
        fatality: 0.035,
    },
];

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    // First US case in the source dataset.
    let start = NaiveDate::from_ymd_opt(2020, 1, 21).context("invalid start date")?;
    let days = 200;

    let output_path = "us-states.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output CSV")?;
    writer.write_record(["date", "state", "fips", "cases", "deaths"])?;

    let mut totals = [0u64; STATES.len()];
    let mut rows = 0usize;
    // Date-major order, states interleaved, like the published file.
    for day in 0..days {
        let date = start + Duration::days(day);
        for (i, st) in STATES.iter().enumerate() {
            if day < st.first_day {
                continue;
            }
            let t = (day - st.first_day) as f64;
            let expected = logistic(t, st.capacity, st.rate, st.midpoint).max(1.0);
            let jitter = 1.0 + (rng.next_f64() - 0.5) * 0.02;
            // Cumulative counts never go down in this synthetic data.
            totals[i] = totals[i].max((expected * jitter) as u64);
            let deaths = (totals[i] as f64 * st.fatality) as u64;

            writer.write_record([
                date.to_string(),
                st.name.to_string(),
                st.fips.to_string(),
                totals[i].to_string(),
                deaths.to_string(),
            ])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing output CSV")?;

    log::info!("Wrote {rows} rows for {} states to {output_path}", STATES.len());
    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
