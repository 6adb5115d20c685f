use bstring::BString;
use slotmap::SlotMap;

use crate::graphics::Point;

slotmap::new_key_type! {
    pub struct Handle;
}

#[derive(Clone, Debug)]
pub struct Object {
    pub name: BString,
    /// Map tile, `None` when the object is inside a container.
    pub tile: Option<Point>,
    pub container: Option<Handle>,
}

impl Object {
    pub fn new(name: BString, tile: Point) -> Self {
        Self {
            name,
            tile: Some(tile),
            container: None,
        }
    }
}

/// Object table. Objects added later are drawn on top of the earlier ones.
#[derive(Default)]
pub struct Objects {
    handles: SlotMap<Handle, Object>,
    order: Vec<Handle>,
}

impl Objects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, obj: Object) -> Handle {
        let h = self.handles.insert(obj);
        self.order.push(h);
        h
    }

    pub fn contains(&self, h: Handle) -> bool {
        self.handles.contains_key(h)
    }

    pub fn get(&self, h: Handle) -> Option<&Object> {
        self.handles.get(h)
    }

    pub fn get_mut(&mut self, h: Handle) -> Option<&mut Object> {
        self.handles.get_mut(h)
    }

    /// Moves the object to the top of the drawing order.
    pub fn raise(&mut self, h: Handle) {
        if let Some(i) = self.order.iter().position(|&v| v == h) {
            self.order.remove(i);
            self.order.push(h);
        }
    }

    /// Objects on the map tile, bottom to top.
    pub fn at(&self, tile: Point) -> impl Iterator<Item=Handle> + '_ {
        self.order.iter()
            .copied()
            .filter(move |&h| self.handles[h].tile == Some(tile))
    }

    /// Objects directly inside `container`, in the order they were put there.
    pub fn contents(&self, container: Handle) -> impl Iterator<Item=Handle> + '_ {
        self.order.iter()
            .copied()
            .filter(move |&h| self.handles[h].container == Some(container))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bstring::bfmt::ToBString;

    #[test]
    fn drawing_order() {
        let mut objs = Objects::new();
        let tile = Point::new(3, 4);
        let a = objs.insert(Object::new("a".to_bstring(), tile));
        let b = objs.insert(Object::new("b".to_bstring(), tile));
        objs.insert(Object::new("c".to_bstring(), Point::new(3, 5)));

        assert_eq!(objs.at(tile).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(objs.at(Point::new(0, 0)).count(), 0);

        objs.raise(a);
        assert_eq!(objs.at(tile).collect::<Vec<_>>(), vec![b, a]);
    }

    #[test]
    fn contents() {
        let mut objs = Objects::new();
        let bag = objs.insert(Object::new("bag".to_bstring(), Point::new(0, 0)));
        let key = objs.insert(Object::new("key".to_bstring(), Point::new(0, 0)));
        {
            let key = objs.get_mut(key).unwrap();
            key.tile = None;
            key.container = Some(bag);
        }
        assert_eq!(objs.contents(bag).collect::<Vec<_>>(), vec![key]);
        assert_eq!(objs.at(Point::new(0, 0)).collect::<Vec<_>>(), vec![bag]);
    }
}
