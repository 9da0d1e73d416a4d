use criterion::{criterion_group, criterion_main, Criterion};
use job_recommender::{JobRecord, Profile, Recommender, RecommenderConfig};

/// Deterministic synthetic corpus: every record mixes a handful of terms
/// from a fixed pool so vocabularies overlap without being identical.
fn synthetic_jobs(count: usize) -> Vec<JobRecord> {
    const POOL: &[&str] = &[
        "python", "sql", "rust", "javascript", "react", "design", "marketing", "analysis",
        "dashboards", "pipelines", "kubernetes", "testing", "research", "modeling", "campaigns",
        "frontend", "backend", "cloud", "security", "automation",
    ];
    (0..count)
        .map(|i| {
            let skills: Vec<String> = (0..4).map(|j| POOL[(i * 7 + j * 3) % POOL.len()].to_string()).collect();
            JobRecord {
                id: format!("J{i:05}"),
                title: format!("{} specialist", POOL[i % POOL.len()]),
                description: format!(
                    "Work on {} and {} with a focus on {}.",
                    POOL[(i * 3) % POOL.len()],
                    POOL[(i * 5 + 1) % POOL.len()],
                    POOL[(i * 11 + 2) % POOL.len()],
                ),
                skills,
                industry: POOL[(i * 13) % POOL.len()].to_string(),
                level: if i % 3 == 0 { "entry" } else { "senior" }.to_string(),
                ..JobRecord::default()
            }
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let jobs = synthetic_jobs(1_000);
    c.bench_function("update_1k_jobs", |b| {
        b.iter(|| {
            let recommender = Recommender::new(RecommenderConfig::default());
            recommender.update(jobs.clone()).expect("fit failed");
            recommender
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::new(RecommenderConfig::default());
    recommender.update(synthetic_jobs(1_000)).expect("fit failed");
    let profile = Profile {
        skills: Some(vec!["python".to_string(), "sql".to_string()]),
        interests: Some(vec!["data analysis".to_string()]),
        ..Profile::default()
    };

    c.bench_function("recommend_warm_cache", |b| {
        b.iter(|| recommender.recommend(&profile, None, None).expect("query failed"))
    });

    let mut round = 0_usize;
    c.bench_function("recommend_cold_cache", |b| {
        b.iter(|| {
            // a fresh summary each round defeats the query cache
            round += 1;
            let cold = Profile {
                summary: Some(format!("round {round}")),
                ..profile.clone()
            };
            recommender.recommend(&cold, None, None).expect("query failed")
        })
    });
}

criterion_group!(benches, bench_fit, bench_recommend);
criterion_main!(benches);
