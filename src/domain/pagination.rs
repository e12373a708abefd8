/// ページ指定エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequestError {
    /// ページ番号が負
    NegativePage(i64),
    /// ページサイズが1未満
    InvalidSize(i64),
    /// ページ番号が表現できる上限を超える
    PageOutOfRange(i64),
    /// ページサイズが表現できる上限を超える
    SizeOutOfRange(i64),
}

impl std::fmt::Display for PageRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageRequestError::NegativePage(page) => {
                write!(f, "Page index must not be less than zero: {}", page)
            }
            PageRequestError::InvalidSize(size) => {
                write!(f, "Page size must not be less than one: {}", size)
            }
            PageRequestError::PageOutOfRange(page) => {
                write!(f, "Page index must not exceed {}: {}", u32::MAX, page)
            }
            PageRequestError::SizeOutOfRange(size) => {
                write!(f, "Page size must not exceed {}: {}", u32::MAX, size)
            }
        }
    }
}

/// ページ指定（0始まりのページ番号とページサイズ）
///
/// 不変条件：page >= 0, size >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, PageRequestError> {
        if page < 0 {
            return Err(PageRequestError::NegativePage(page));
        }
        if size < 1 {
            return Err(PageRequestError::InvalidSize(size));
        }
        let page = u32::try_from(page).map_err(|_| PageRequestError::PageOutOfRange(page))?;
        let size = u32::try_from(size).map_err(|_| PageRequestError::SizeOutOfRange(size))?;
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// 先頭から読み飛ばす件数
    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// ページ（全件数を伴う順序付きの部分集合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(request.offset(), 30);
        assert_eq!(request.page(), 3);
        assert_eq!(request.size(), 10);
    }

    #[test]
    fn test_page_request_rejects_negative_page() {
        assert_eq!(
            PageRequest::new(-1, 10),
            Err(PageRequestError::NegativePage(-1))
        );
    }

    #[test]
    fn test_page_request_rejects_zero_size() {
        assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::InvalidSize(0)));
    }

    #[test]
    fn test_page_request_rejects_values_beyond_u32() {
        let too_far = i64::from(u32::MAX) + 1;

        let page_err = PageRequest::new(too_far, 10).unwrap_err();
        assert_eq!(page_err, PageRequestError::PageOutOfRange(too_far));
        assert_eq!(
            page_err.to_string(),
            format!("Page index must not exceed 4294967295: {}", too_far)
        );

        assert_eq!(
            PageRequest::new(0, too_far),
            Err(PageRequestError::SizeOutOfRange(too_far))
        );
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![1, 2], request, 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 2);
        assert_eq!(page.total, 5);
    }
}
