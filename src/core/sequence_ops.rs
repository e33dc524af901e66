use crate::core::{Comparator, StringSeq, Transform};
use crate::utils::error::{Result, SeqError};

impl StringSeq {
    /// 移除並回傳指定索引的元素
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.items.len() {
            return Err(SeqError::out_of_bounds("remove_at", index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Removes every element matching `predicate`; survivors keep their order.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&str) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.items.push(value.into());
    }

    pub fn insert(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        if index > self.items.len() {
            return Err(SeqError::out_of_bounds("insert", index, self.items.len()));
        }
        self.items.insert(index, value.into());
        Ok(())
    }

    pub fn push_all(&mut self, other: &StringSeq) {
        self.items.extend(other.items.iter().cloned());
    }

    /// 在 `index` 插入整段，原本 `>= index` 的元素往右移
    pub fn insert_all(&mut self, index: usize, other: &StringSeq) -> Result<()> {
        if index > self.items.len() {
            return Err(SeqError::out_of_bounds("insert_all", index, self.items.len()));
        }
        let tail = self.items.split_off(index);
        self.items.extend(other.items.iter().cloned());
        self.items.extend(tail);
        Ok(())
    }

    /// Removes every occurrence of any value present in `other`.
    pub fn remove_all(&mut self, other: &StringSeq) -> bool {
        self.remove_if(|item| other.contains(item))
    }

    /// Keeps only the values present in `other`.
    pub fn retain_all(&mut self, other: &StringSeq) -> bool {
        self.remove_if(|item| !other.contains(item))
    }

    pub fn replace_all<T: Transform + ?Sized>(&mut self, transform: &T) {
        for item in self.items.iter_mut() {
            *item = transform.apply(item);
        }
    }

    /// 覆寫指定索引，回傳舊值
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<String> {
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value.into())),
            None => Err(SeqError::out_of_bounds("set", index, self.items.len())),
        }
    }

    /// Removes only the first element equal to `value`.
    pub fn remove_first(&mut self, value: &str) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Stable sort.
    pub fn sort_by<C: Comparator + ?Sized>(&mut self, comparator: &C) {
        self.items.sort_by(|a, b| comparator.compare(a, b));
    }
}
