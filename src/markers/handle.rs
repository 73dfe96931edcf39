use crate::icon::IconId;
use std::cell::RefCell;
use std::rc::Weak;

/// A mounted marker render target, owned by the render host.
///
/// `set_icon` is the direct mutation channel: it changes the displayed icon
/// without going through the declarative descriptor/diff pipeline. Because
/// the declarative pipeline never sees these writes, a remount discards them
/// and the target comes back up showing its declaratively rendered icon.
/// Callers that need the current band reflected after a remount must reapply
/// it through the normal batch pass.
pub trait MarkerRenderTarget {
    /// Sets the displayed icon imperatively
    fn set_icon(&mut self, icon: IconId);
}

/// Opaque, non-owning reference to a mounted marker render target.
///
/// The host owns the target; the pool holds only this back-reference. A
/// handle whose target has been unmounted fails to upgrade and is skipped by
/// the batch pass, which is how unmount races are tolerated without locking.
pub type MarkerHandle = Weak<RefCell<dyn MarkerRenderTarget>>;
