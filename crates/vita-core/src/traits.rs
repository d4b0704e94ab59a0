//! Core abstraction traits for cell reading and observation.

use crate::notification::Notification;

/// Read-only access to a cell matrix.
///
/// Implemented by the live grid and by [`Snapshot`](crate::Snapshot).
/// Coordinates outside the matrix read as dead, which is exactly the
/// dead-border convention of the neighbour count.
pub trait CellAccess {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// State of column `x`, row `y`. `false` outside the matrix.
    fn is_alive(&self, x: i32, y: i32) -> bool;

    /// Number of live cells.
    fn population(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if self.is_alive(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether `(x, y)` names a cell of the matrix.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}

/// Receiver of controller notifications: the presentation layer.
///
/// Called from the controller's dispatcher thread, never while the
/// world lock is held, so an observer may issue commands back to the
/// controller.
///
/// Any `Fn(&Notification) + Send + Sync` closure is an observer.
pub trait Observer: Send + Sync {
    /// Handle one notification.
    fn notify(&self, notification: &Notification);
}

impl<F> Observer for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}
