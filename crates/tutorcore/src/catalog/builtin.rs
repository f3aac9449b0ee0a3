use super::{DocumentDescriptor, TopicFiles, TopicRecord};

/// (key, title) pairs of the built-in catalog, in menu order
const TOPICS: &[(&str, &str)] = &[
    ("arrays", "Масиви"),
    ("linked_lists", "Зв'язні списки"),
    ("stacks", "Стеки"),
    ("queues", "Черги"),
    ("hash_tables", "Хеш-таблиці"),
    ("trees", "Дерева"),
    ("graphs", "Графи"),
    ("sorting", "Сортування"),
    ("searching", "Пошук"),
    ("recursion", "Рекурсія"),
];

/// Documents live under `docs/` next to the binary: `docs/<key>_theory.pdf`
/// and `docs/<key>_practice.pdf`.
pub(super) fn topics() -> Vec<TopicRecord> {
    TOPICS
        .iter()
        .map(|&(key, title)| TopicRecord {
            key: key.to_string(),
            title: title.to_string(),
            files: TopicFiles {
                theory: DocumentDescriptor::local(format!("docs/{}_theory.pdf", key)),
                practice: DocumentDescriptor::local(format!("docs/{}_practice.pdf", key)),
            },
        })
        .collect()
}
