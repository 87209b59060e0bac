// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markguard::{validate, AllowPolicy, Sanitizer};

const CARD: &str = r#"
    <div class="card" data-id="42">
        <h2 style="color: #333; font-size: 18px">Weather</h2>
        <p>Sunny, <b>24&deg;C</b></p>
        <button onclick="toggle()">Details</button>
        <a href="https://example.com/forecast">Forecast</a>
        <img src="data:image/png;base64,iVBORw0KGgo=" alt="icon">
    </div>
"#;

fn sanitize_benchmark(c: &mut Criterion) {
    let sanitizer = Sanitizer::new(AllowPolicy::default());

    c.bench_function("sanitize_card", |b| {
        b.iter(|| black_box(sanitizer.sanitize(black_box(CARD))))
    });

    let payloads = vec![
        "<script>alert(1)</script>",
        "<img src=x onerror=alert(1)>",
        "<svg onload=alert(1)>",
        r#"<a href="javascript:alert(1)">x</a>"#,
        r#"<p style="width: expression(alert(1))">x</p>"#,
    ];

    c.bench_function("sanitize_payloads", |b| {
        b.iter(|| {
            for payload in &payloads {
                black_box(sanitizer.sanitize(payload));
            }
        })
    });

    let large = CARD.repeat(200);
    c.bench_function("sanitize_large", |b| {
        b.iter(|| black_box(sanitizer.sanitize(black_box(&large))))
    });
}

fn validate_benchmark(c: &mut Criterion) {
    let clean = Sanitizer::default().sanitize(&CARD.repeat(200));

    c.bench_function("validate_large", |b| {
        b.iter(|| black_box(validate(black_box(&clean))))
    });
}

criterion_group!(benches, sanitize_benchmark, validate_benchmark);
criterion_main!(benches);
