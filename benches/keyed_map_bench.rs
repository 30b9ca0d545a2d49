use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use enum_hashmap::{enum_key, EnumHash, HashMap};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Opcode {
    Nop,
    Load,
    Store,
    Add,
    Sub,
    Jump,
    Call,
    Halt,
}

enum_key!(Opcode as u8);

const OPCODES: [Opcode; 8] = [
    Opcode::Nop,
    Opcode::Load,
    Opcode::Store,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Jump,
    Opcode::Call,
    Opcode::Halt,
];

fn bench_insert(c: &mut Criterion) {
    c.bench_function("enum_key_insert_8", |b| {
        b.iter_batched(
            || HashMap::<Opcode, u64>::default(),
            |mut m| {
                for (i, op) in OPCODES.iter().enumerate() {
                    m.insert(*op, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let mut m: HashMap<Opcode, u64> = HashMap::default();
    for (i, op) in OPCODES.iter().enumerate() {
        m.insert(*op, i as u64);
    }
    let mut it = OPCODES.iter().cycle();
    c.bench_function("enum_key_get_hit", |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k))
        })
    });

    // Baseline: the same lookups keyed directly by the representation.
    let mut byte: HashMap<u8, u64> = HashMap::default();
    for (i, op) in OPCODES.iter().enumerate() {
        byte.insert(*op as u8, i as u64);
    }
    let mut bit = (0u8..8).cycle();
    c.bench_function("u8_key_get_hit", |b| {
        b.iter(|| {
            let k = bit.next().unwrap();
            black_box(byte.get(&k))
        })
    });
}

fn bench_hash_enum(c: &mut Criterion) {
    let adapter: EnumHash = EnumHash::default();
    let mut it = OPCODES.iter().cycle();
    c.bench_function("hash_enum", |b| {
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(adapter.hash_enum(k))
        })
    });
}

criterion_group!(benches, bench_insert, bench_get_hit, bench_hash_enum);
criterion_main!(benches);
