use crate::domain::isbn::generate_isbn13;
use crate::ports::isbn_generator::IsbnGenerator;

/// IsbnGeneratorの本番実装
///
/// スレッドローカルの乱数生成器から9桁を一様に引く。
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIsbnGenerator;

impl RandomIsbnGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IsbnGenerator for RandomIsbnGenerator {
    fn generate(&self) -> String {
        generate_isbn13(&mut rand::thread_rng())
    }
}
