use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fuzzycpp_parser::Parser;
use fuzzycpp_token::fixture::annotate;

// A medium-size C++ source with the constructs the parser recognizes, plus
// a few regions it has to resynchronize over.
const CPP_SOURCE: &str = r#"
// forward declarations
class Widget;
class Renderer;

int global_counter = 0;
const char* build_tag = "release";

class Widget : public Object, Drawable {
public:
    Widget();
    ~Widget();
    int width, height;
    std::vector<int> children;
    unsigned long long flags = 0;

    virtual int measure(int available, bool exact);
    static Widget* create(int kind);

private:
    Renderer* renderer;
    bool dirty = true;
};

int measure_all(std::vector<int> sizes, int scale) {
    total: result = 0;
    result = result + sizes.count * scale;
    accumulate(result, scale + 1, lookup(sizes, 0));
    return result;
}

void Widget() {
    ready = true && !closed;
    mask = bits << 2 | flags & 15;
    return;
}

struct Point { int x; int y; };

bitset<16 + 16> wide_mask;
map<int, Widget> registry;

int unbalanced( ;
still_recovers();
"#;

fn bench_parse_cpp(c: &mut Criterion) {
    let tokens = annotate(CPP_SOURCE);
    c.bench_function("parse_cpp_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::new(&arena, black_box(&tokens));
            let tu = parser.parse_translation_unit();
            black_box(tu.statements.len());
        });
    });
}

criterion_group!(benches, bench_parse_cpp);
criterion_main!(benches);
