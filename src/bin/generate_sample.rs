use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use rusty_records::data::Post;
use rusty_records::record;
use rusty_records::Record;

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

    /// Uniform pick from a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn write_json<T: serde::Serialize>(path: &str, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {path}"))?;
    log::info!("Wrote {path}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let first_names = ["John", "Dave", "Alice", "Bob", "Mia"];
    let last_names = ["Doe", "Smith", "Lee"];
    let ages: [i64; 4] = [20, 25, 30, 35];

    let users: Vec<Record> = (1..=20i64)
        .map(|id| {
            record! {
                "id" => id,
                "firstname" => *rng.pick(&first_names),
                "lastname" => *rng.pick(&last_names),
                "age" => *rng.pick(&ages),
            }
        })
        .collect();

    let subjects = ["types", "generics", "records", "merging"];
    let posts: Vec<Post> = (1..=60)
        .map(|id| {
            let subject = rng.pick(&subjects);
            Post {
                user_id: (id - 1) / 3 + 1,
                id,
                title: format!("Notes on {subject} #{id}"),
                body: format!("A short post about {subject}."),
            }
        })
        .collect();

    write_json("users.json", &users)?;
    write_json("posts.json", &posts)?;

    println!("Wrote {} users to users.json and {} posts to posts.json", users.len(), posts.len());
    Ok(())
}
