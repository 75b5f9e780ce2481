use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tmsoap_core::entities::Customer;
use tmsoap_core::{check_response, decode_list, decode_single, deep_objectify, find_first_tag};

/// Helper to build a customer list response with `count` entries.
fn build_list_response(count: usize) -> String {
    let mut body = String::from(
        "<S:Envelope xmlns:S=\"http://schemas.xmlsoap.org/soap/envelope/\"><S:Body>\
         <ns2:CustomerListResult><statusCode>0</statusCode><statusMessage>OK</statusMessage>",
    );
    for id in 0..count {
        body.push_str(&format!(
            "<data><customerID>{id}</customerID><fullName>Customer {id}</fullName>\
             <email>c{id}@example.com</email><status>1</status>\
             <dateOfInitialContact>/Date(1694544000000)/</dateOfInitialContact></data>"
        ));
    }
    body.push_str("</ns2:CustomerListResult></S:Body></S:Envelope>");
    body
}

/// Helper to build a single-customer response.
fn build_single_response() -> String {
    "<S:Envelope><S:Body><ns2:CustomerResult>\
     <statusCode>0</statusCode><statusMessage>OK</statusMessage>\
     <data><customerID>7</customerID><fullName>Jane Doe</fullName>\
     <email>jane@example.com</email><formOfAddress>2</formOfAddress>\
     <status>1</status></data>\
     </ns2:CustomerResult></S:Body></S:Envelope>"
        .to_string()
}

fn bench_tag_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_scanning");

    for count in &[1usize, 10, 100] {
        let body = build_list_response(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| find_first_tag(black_box(body), "statusMessage"));
        });
    }

    group.finish();
}

fn bench_objectify(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_objectify");

    for count in &[1usize, 10, 100] {
        let body = build_list_response(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| deep_objectify(black_box(body)));
        });
    }

    group.finish();
}

fn bench_full_decode(c: &mut Criterion) {
    let single = build_single_response();
    c.bench_function("decode_single_customer", |b| {
        b.iter(|| decode_single::<Customer>(black_box(&single)));
    });

    let mut group = c.benchmark_group("decode_list_customers");
    for count in &[10usize, 100] {
        let body = build_list_response(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| decode_list::<Customer>(black_box(body)));
        });
    }
    group.finish();
}

fn bench_status_check(c: &mut Criterion) {
    let body = build_single_response();
    c.bench_function("check_response", |b| {
        b.iter(|| check_response(black_box(&body)));
    });
}

fn bench_miss_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("miss_paths");

    // No matching entity anywhere: the finder walks everything.
    let empty = "<S:Envelope><S:Body><ns2:VersionResult>\
                 <statusCode>0</statusCode><data>9.4</data>\
                 </ns2:VersionResult></S:Body></S:Envelope>";
    group.bench_function("entity_miss", |b| {
        b.iter(|| decode_single::<Customer>(black_box(empty)));
    });

    // Garbage input: scans fail fast without matching.
    let garbage = "x".repeat(4096);
    group.bench_function("garbage_input", |b| {
        b.iter(|| decode_single::<Customer>(black_box(&garbage)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tag_scanning,
    bench_objectify,
    bench_full_decode,
    bench_status_check,
    bench_miss_paths
);
criterion_main!(benches);
