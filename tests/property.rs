//! Property-based tests - collection accessor invariants with proptest.

use proptest::collection::hash_set;
use proptest::prelude::*;

use in_n_out_books::domain::collection::{add, delete, find, find_one};
use in_n_out_books::domain::{Book, BookId, Title};

fn catalog(ids: &[u64]) -> Vec<Book> {
    ids.iter()
        .map(|id| Book::new(BookId::new(*id), Title::new(format!("Book {id}")).unwrap()))
        .collect()
}

fn unique_ids() -> impl Strategy<Value = Vec<u64>> {
    hash_set(0u64..10_000, 0..40).prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// 存在的书号总能查到对应记录
    #[test]
    fn find_one_returns_matching_record(ids in unique_ids()) {
        let books = catalog(&ids);
        for id in &ids {
            let found = find_one(&books, BookId::new(*id));
            prop_assert_eq!(found.map(|b| b.id()), Some(BookId::new(*id)));
        }
    }

    /// 不存在的书号返回 None
    #[test]
    fn find_one_absent_is_none(ids in unique_ids(), probe in 10_000u64..20_000) {
        let books = catalog(&ids);
        prop_assert!(find_one(&books, BookId::new(probe)).is_none());
    }

    /// add 之后 find 中恰好出现一次，find_one 能查到
    #[test]
    fn add_then_find(ids in unique_ids(), new_id in 10_000u64..20_000) {
        let mut books = catalog(&ids);
        let added = add(&mut books, catalog(&[new_id]).remove(0));

        let all = find(&books);
        prop_assert_eq!(all.len(), ids.len() + 1);
        prop_assert_eq!(all.iter().filter(|b| b.id() == added.id()).count(), 1);
        prop_assert_eq!(find_one(&books, added.id()), Some(&added));
    }

    /// delete 已存在书号后查不到，长度减一，其余顺序不变
    #[test]
    fn delete_existing(ids in unique_ids().prop_filter("non-empty", |v| !v.is_empty()), pick in any::<prop::sample::Index>()) {
        let mut books = catalog(&ids);
        let target = BookId::new(ids[pick.index(ids.len())]);

        let removed = delete(&mut books, target);

        prop_assert_eq!(removed.map(|b| b.id()), Some(target));
        prop_assert!(find_one(&books, target).is_none());
        prop_assert_eq!(books.len(), ids.len() - 1);

        let expected: Vec<u64> = ids.iter().copied().filter(|id| BookId::new(*id) != target).collect();
        let remaining: Vec<u64> = books.iter().map(|b| b.id().value()).collect();
        prop_assert_eq!(remaining, expected);
    }

    /// 书号的文本形式可以解析回原值
    #[test]
    fn book_id_parses_from_text(n in any::<u64>()) {
        prop_assert_eq!(n.to_string().parse::<BookId>().unwrap(), BookId::new(n));
    }
}
