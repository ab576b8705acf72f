//! # ルートハンドラ
//!
//! 疎通確認用の挨拶エンドポイント。

/// ルートエンドポイント
///
/// 固定の挨拶文字列を返す。
pub async fn hello() -> &'static str {
   "Hello World!"
}

#[cfg(test)]
mod tests {
   use super::*;

   #[tokio::test]
   async fn test_固定の挨拶を返す() {
      assert_eq!(hello().await, "Hello World!");
   }
}
