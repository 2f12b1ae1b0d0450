// scoped event listener registration
//
// whoever attaches a listener hands back an Unsubscribe holding the detach step.  dropping the
// guard detaches, so a view that stores it cannot leave a dangling callback behind when it
// unmounts, no matter how the unmount happens
pub struct Unsubscribe {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Unsubscribe {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Unsubscribe {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
