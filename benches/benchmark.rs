use criterion::{criterion_group, criterion_main, Criterion};
use wifi_taxonomy::{identify_wifi_device, make_v2_signature};

const SIGNATURES: &[(&str, &str)] = &[
    (
        "wifi|probe:0,1,50,45,htcap:186e|assoc:0,1,50,48,221(0050f2,2),45,127,htcap:086c,htmcs:000000ff",
        "00:00:01:00:00:01",
    ),
    (
        "wifi3|probe:0,1,45,221(00904c,51),htcap:09ef,htagg:1b,htmcs:0000ffff|assoc:0,1,33,36,48,45,221(00904c,51),221(0050f2,2),cap:0011,htcap:09ef,htagg:1b,htmcs:0000ffff,txpow:0005",
        "3c:15:c2:00:00:01",
    ),
    (
        "wifi|probe:0,1,45,127,191,221(00904c,51),htcap:09ef,htagg:17,htmcs:0000ffff,vhtcap:0f8259b2,vhtrxmcs:0000ffea,vhttxmcs:0000ffea|assoc:0,1,33,36,48,45,127,191,221(00904c,51),221(0050f2,2),htcap:09ef,htagg:17,htmcs:0000ffff,vhtcap:0f8259b2,vhtrxmcs:0000ffea,vhttxmcs:0000ffea",
        "3c:15:c2:00:00:01",
    ),
    ("wifi|probe:1,2,3,4,htcap:0|assoc:1", "00:00:01:00:00:01"),
];

fn bench_identify(c: &mut Criterion) {
    // Warm the default database outside the measured loop.
    let _ = identify_wifi_device("wifi|probe:0|assoc:0", "00:00:01:00:00:01");

    c.bench_function("identify_wifi_device", |b| {
        b.iter(|| {
            for (signature, mac) in SIGNATURES {
                std::hint::black_box(identify_wifi_device(signature, mac));
            }
        })
    });

    c.bench_function("make_v2_signature", |b| {
        b.iter(|| {
            for (signature, _) in SIGNATURES {
                std::hint::black_box(make_v2_signature(signature));
            }
        })
    });
}

criterion_group!(benches, bench_identify);
criterion_main!(benches);
