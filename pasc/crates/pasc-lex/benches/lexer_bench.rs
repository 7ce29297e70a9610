//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package pasc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pasc_lex::Lexer;
use pasc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    lexer.count()
}

const PROGRAM: &str = r#"
program media;
var
  notas: array of real;
  soma, media: real;
  i, n: integer;
  conceito: char;
  nome: string;
begin
  /* le as notas e calcula a media */
  soma := 0.0;
  for i := 1 to n do
    soma := soma + notas;
  media := soma / n;
  if media >= 7.0 then
    conceito := 'A'
  else if media <> -1.5e-3 then
    conceito := 'B';
  nome := "aluno";
end.
"#;

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("assignment", |b| {
        b.iter(|| lexer_token_count(black_box("x := x - 1;")))
    });

    group.bench_function("small_program", |b| {
        b.iter(|| lexer_token_count(black_box(PROGRAM)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let source = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_program", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let comments = "/* a comment that says nothing */ x".repeat(1_000);
    group.throughput(Throughput::Bytes(comments.len() as u64));

    group.bench_function("comment_heavy", |b| {
        b.iter(|| lexer_token_count(black_box(&comments)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    let numbers = "123 -45 6.75 1.5e10 2E-3 ".repeat(500);
    group.bench_function("numbers", |b| {
        b.iter(|| lexer_token_count(black_box(&numbers)))
    });

    let strings = "\"hello world\" 'c' ".repeat(500);
    group.bench_function("strings_and_chars", |b| {
        b.iter(|| lexer_token_count(black_box(&strings)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_large,
    bench_lexer_literals
);
criterion_main!(benches);
