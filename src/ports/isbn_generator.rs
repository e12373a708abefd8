/// ISBN生成ポート
///
/// 採番の乱数源を差し替えられるようにする。
/// 生成値の一意性は保証しない。
pub trait IsbnGenerator: Send + Sync {
    /// 有効なISBN-13を1つ生成する
    fn generate(&self) -> String;
}
