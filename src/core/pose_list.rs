//! Geordnete Pose-Liste mit atomarer Neu-Nummerierung.

use super::{EditorError, EditorResult, Pose};

/// Container für die Posen eines Stores.
///
/// Alle strukturellen Änderungen laufen über diese Methoden; jede davon
/// nummeriert `pose_index` neu, sodass immer `poses[i].pose_index() == i` gilt.
/// Index 0 ist die Ursprungs-Pose und kann nicht entfernt werden.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseList {
    poses: Vec<Pose>,
}

impl PoseList {
    /// Erstellt eine Liste, die nur die Ursprungs-Pose enthält.
    pub fn with_origin(origin: Pose) -> Self {
        let mut list = Self {
            poses: vec![origin],
        };
        list.renumber();
        list
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Immer `false`: die Ursprungs-Pose bleibt erhalten.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn as_slice(&self) -> &[Pose] {
        &self.poses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pose> {
        self.poses.iter()
    }

    /// Ursprungs-Pose (Index 0).
    pub fn origin(&self) -> &Pose {
        &self.poses[0]
    }

    pub fn get(&self, index: usize) -> EditorResult<&Pose> {
        let len = self.poses.len();
        self.poses
            .get(index)
            .ok_or(EditorError::out_of_range(index, len))
    }

    /// Ändert die Pose an `index` über `f`; `pose_index` wird danach wiederhergestellt.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut Pose) -> R) -> EditorResult<R> {
        let len = self.poses.len();
        let slot = self
            .poses
            .get_mut(index)
            .ok_or(EditorError::out_of_range(index, len))?;
        let result = f(slot);
        slot.pose_index = index;
        Ok(result)
    }

    /// Ersetzt die Werte an `index`, der Index selbst bleibt erhalten.
    pub fn set(&mut self, index: usize, pose: Pose) -> EditorResult<()> {
        self.update(index, |slot| *slot = pose)
    }

    /// Hängt eine Pose an und gibt ihren neuen Index zurück.
    pub fn push(&mut self, pose: Pose) -> usize {
        self.poses.push(pose);
        self.renumber();
        self.poses.len() - 1
    }

    /// Entfernt die Pose an `index`; alle Nachfolger rücken um eins auf.
    pub fn remove(&mut self, index: usize) -> EditorResult<Pose> {
        if index >= self.poses.len() {
            return Err(EditorError::out_of_range(index, self.poses.len()));
        }
        if index == 0 {
            return Err(EditorError::OriginNotRemovable);
        }
        let removed = self.poses.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Verwirft alle Posen ausser dem Ursprung. Gibt die Anzahl entfernter Posen zurück.
    pub fn truncate_to_origin(&mut self) -> usize {
        let removed = self.poses.len() - 1;
        self.poses.truncate(1);
        removed
    }

    /// Ersetzt den kompletten Inhalt (z.B. Tabellen-Rebuild).
    ///
    /// Eine leere Eingabe würde den Ursprung verlieren und wird abgelehnt.
    pub fn replace_all(&mut self, poses: Vec<Pose>) -> EditorResult<()> {
        if poses.is_empty() {
            return Err(EditorError::OriginNotRemovable);
        }
        self.poses = poses;
        self.renumber();
        Ok(())
    }

    /// Wendet `f` auf jede Pose an, ohne die Struktur zu ändern.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Pose)) {
        for pose in &mut self.poses {
            f(pose);
        }
        self.renumber();
    }

    fn renumber(&mut self) {
        for (index, pose) in self.poses.iter_mut().enumerate() {
            pose.pose_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(list: &PoseList) -> Vec<usize> {
        list.iter().map(Pose::pose_index).collect()
    }

    fn list_with(count: usize) -> PoseList {
        let mut list = PoseList::with_origin(Pose::default());
        for i in 1..count {
            list.push(Pose::new(i as f64, 0.0, 1.0, 0.0, 0.0, 0.0));
        }
        list
    }

    #[test]
    fn push_assigns_next_index() {
        let mut list = list_with(1);
        let index = list.push(Pose::new(5.0, 5.0, 1.0, 0.0, 0.0, 0.0));
        assert_eq!(index, 1);
        assert_eq!(indices(&list), vec![0, 1]);
    }

    #[test]
    fn remove_renumbers_followers() {
        let mut list = list_with(5);
        let removed = list.remove(2).expect("Index 2 vorhanden");
        assert_eq!(removed.x(), 2.0);
        assert_eq!(indices(&list), vec![0, 1, 2, 3]);
        // Ehemals Index 3 und 4 liegen jetzt auf 2 und 3
        assert_eq!(list.get(2).unwrap().x(), 3.0);
        assert_eq!(list.get(3).unwrap().x(), 4.0);
    }

    #[test]
    fn origin_cannot_be_removed() {
        let mut list = list_with(3);
        assert_eq!(list.remove(0), Err(EditorError::OriginNotRemovable));

        let mut single = list_with(1);
        assert_eq!(single.remove(0), Err(EditorError::OriginNotRemovable));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut list = list_with(2);
        assert_eq!(list.remove(2), Err(EditorError::out_of_range(2, 2)));
        assert!(list.get(9).is_err());
        assert!(list.set(9, Pose::default()).is_err());
    }

    #[test]
    fn set_keeps_slot_index() {
        let mut list = list_with(3);
        let mut foreign = Pose::new(9.0, 9.0, 1.0, 0.0, 0.0, 0.0);
        foreign.pose_index = 42;
        list.set(1, foreign).unwrap();
        assert_eq!(list.get(1).unwrap().pose_index(), 1);
        assert_eq!(list.get(1).unwrap().x(), 9.0);
    }

    #[test]
    fn update_cannot_break_index() {
        let mut list = list_with(3);
        let x = list
            .update(2, |pose| {
                *pose = Pose::new(7.0, 7.0, 1.0, 0.0, 0.0, 0.0);
                pose.x()
            })
            .unwrap();
        assert_eq!(x, 7.0);
        assert_eq!(indices(&list), vec![0, 1, 2]);
        assert_eq!(
            list.update(3, |_| ()),
            Err(EditorError::out_of_range(3, 3))
        );
    }

    #[test]
    fn replace_all_rejects_empty_and_renumbers() {
        let mut list = list_with(2);
        assert!(list.replace_all(Vec::new()).is_err());
        assert_eq!(list.len(), 2);

        list.replace_all(vec![Pose::default(); 4]).unwrap();
        assert_eq!(indices(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn truncate_keeps_origin() {
        let mut list = list_with(4);
        assert_eq!(list.truncate_to_origin(), 3);
        assert_eq!(list.len(), 1);
        assert_eq!(indices(&list), vec![0]);
    }
}
