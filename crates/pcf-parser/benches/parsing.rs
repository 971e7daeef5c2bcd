use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pcf_parser::{PcfConstraint, PcfParser, PcfResult};

const SAMPLE_PCF: &str = r#"
# board pin map
set_io clk_12mhz 35
set_io -nowarn led_r 11
set_io led_g 37
set_io led_b 39
set_io btn_n 10
set_io uart_tx 9
set_io uart_rx 6
set_io -pullup flash_cs 16
set_clk gbuf_0 clk_12mhz
set_clk gbuf_1 pll_out
"#;

fn bench_parse_pcf(c: &mut Criterion) {
    let parser = PcfParser::new();

    c.bench_function("parse_pcf_source", |b| {
        b.iter(|| {
            let constraints: Vec<PcfConstraint> = parser
                .parse_str(black_box(SAMPLE_PCF))
                .collect::<PcfResult<_>>()
                .unwrap();
            constraints
        });
    });
}

criterion_group!(benches, bench_parse_pcf);
criterion_main!(benches);
