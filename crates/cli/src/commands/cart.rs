//! Cart and checkout commands.
//!
//! # Usage
//!
//! ```bash
//! billease plans
//! billease cart add Pro
//! billease cart show
//! billease checkout --yes
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use billease_landing::LandingConfig;
use billease_landing::cart::{CartEvent, CartStore, CartView, Checkout};
use billease_landing::catalog::PlanCatalog;
use billease_landing::notification::NotificationCenter;
use billease_landing::storage::FileStore;

/// A cart store over the configured file, with notifications printed as
/// they are raised.
pub struct CartSession {
    cart: CartStore<FileStore>,
}

impl CartSession {
    /// Open the cart stored in the configured file.
    pub fn open(config: &LandingConfig) -> Self {
        let storage = FileStore::new(&config.storage.file_path);
        let mut cart = CartStore::with_config(storage, &config.storage);

        let notices = Rc::new(RefCell::new(NotificationCenter::new(config.notifications)));
        cart.subscribe(move |event| {
            if let Some(notification) = notices.borrow_mut().on_cart_event(event) {
                print_line(&notification.message);
            }
            if let CartEvent::CheckoutConfirmation { total } = event {
                print_line("Checkout Confirmation");
                print_line("Thank you for choosing BillEase!");
                print_line(&format!("Total: {total}"));
            }
        });

        Self { cart }
    }

    pub fn add(&mut self, plan: &str) -> billease_landing::Result<()> {
        self.cart.add(plan)?;
        self.show()
    }

    pub fn increase(&mut self, index: usize) -> billease_landing::Result<()> {
        let applied = self.cart.increase(index)?;
        self.report(index, applied)
    }

    pub fn decrease(&mut self, index: usize) -> billease_landing::Result<()> {
        let applied = self.cart.decrease(index)?;
        self.report(index, applied)
    }

    pub fn remove(&mut self, index: usize) -> billease_landing::Result<()> {
        let applied = self.cart.remove(index)?;
        self.report(index, applied)
    }

    pub fn clear(&mut self) -> billease_landing::Result<()> {
        self.cart.clear()
    }

    /// Print the cart the way the cart modal lays it out.
    pub fn show(&self) -> billease_landing::Result<()> {
        let view = CartView::from(&self.cart.state()?);
        print_view(&view);
        Ok(())
    }

    /// Run checkout; with `acknowledge` the confirmation is closed and the
    /// cart cleared, otherwise it is dismissed and the cart kept.
    pub fn checkout(&mut self, acknowledge: bool) -> billease_landing::Result<()> {
        match self.cart.checkout()? {
            Checkout::Empty => Ok(()),
            Checkout::Pending(confirmation) if acknowledge => {
                print_line("Your order has been processed successfully.");
                self.cart.acknowledge(confirmation)
            }
            Checkout::Pending(confirmation) => {
                self.cart.dismiss(confirmation);
                print_line("Confirmation dismissed; re-run with --yes to complete checkout.");
                Ok(())
            }
        }
    }

    fn report(&self, index: usize, applied: bool) -> billease_landing::Result<()> {
        if !applied {
            print_line(&format!("No cart line at position {index}"));
        }
        self.show()
    }
}

/// Print the plan catalog.
pub fn plans() {
    for plan in PlanCatalog::default().plans() {
        print_line(&format!("{:<10} {}", plan.name.as_str(), plan.price));
    }
}

fn print_view(view: &CartView) {
    if let Some(placeholder) = view.placeholder() {
        print_line(placeholder);
    }
    for item in &view.items {
        print_line(&format!("[{}] {:<14} {}", item.index, item.title, item.summary));
    }
    print_line(&format!("Total: {}", view.total));
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
