//! 集合访问器
//!
//! 对调用方提供的有序序列进行无状态的读写操作：全量扫描、按键查找、追加、按键删除。
//! 不做任何校验，校验由上层负责

/// 可按键定位的记录
pub trait Keyed {
    type Key: PartialEq + Copy;

    fn key(&self) -> Self::Key;
}

/// 返回全部记录（保持当前顺序），序列为空时返回空
pub fn find<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}

/// 线性扫描，返回第一条键匹配的记录；不存在时返回 `None`
pub fn find_one<T: Keyed>(items: &[T], key: T::Key) -> Option<&T> {
    items.iter().find(|item| item.key() == key)
}

/// 追加记录并返回追加的副本
pub fn add<T: Clone>(items: &mut Vec<T>, item: T) -> T {
    items.push(item.clone());
    item
}

/// 删除第一条键匹配的记录；不存在时不做任何修改并返回 `None`
pub fn delete<T: Keyed>(items: &mut Vec<T>, key: T::Key) -> Option<T> {
    let position = items.iter().position(|item| item.key() == key)?;
    Some(items.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Row {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ]
    }

    #[test]
    fn test_find_returns_all_in_order() {
        let items = rows();
        let found = find(&items);
        assert_eq!(found, items);
        assert!(find::<Row>(&[]).is_empty());
    }

    #[test]
    fn test_find_one_matches_key() {
        let items = rows();
        assert_eq!(find_one(&items, 2).map(|r| r.label), Some("b"));
        assert!(find_one(&items, 9).is_none());
    }

    #[test]
    fn test_find_one_returns_first_duplicate() {
        let mut items = rows();
        items.push(Row { id: 2, label: "dup" });
        assert_eq!(find_one(&items, 2).map(|r| r.label), Some("b"));
    }

    #[test]
    fn test_add_appends_and_returns() {
        let mut items = rows();
        let added = add(&mut items, Row { id: 4, label: "d" });
        assert_eq!(added.id, 4);
        assert_eq!(items.len(), 4);
        assert_eq!(items.last(), Some(&added));
    }

    #[test]
    fn test_delete_removes_first_match() {
        let mut items = rows();
        let removed = delete(&mut items, 1);
        assert_eq!(removed.map(|r| r.label), Some("a"));
        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut items = rows();
        assert!(delete(&mut items, 42).is_none());
        assert_eq!(items, rows());
    }
}
