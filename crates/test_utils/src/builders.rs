//! Fluent builders for domain records
//!
//! Every builder starts from a plausible filled-in record so a test only
//! states what it cares about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::TransactionType;
use domain_billing::{Bill, CustomerType, LineItem};
use domain_ledger::Payment;
use domain_party::Customer;

/// Builds [`Bill`] records
#[derive(Debug, Clone)]
pub struct BillBuilder {
    bill: Bill,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillBuilder {
    pub fn new() -> Self {
        Self {
            bill: Bill {
                id: None,
                invoice_no: "001".to_string(),
                date: "2024-04-01".to_string(),
                customer_name: "Acme Traders".to_string(),
                customer_gst: "27AAEPM1234C1ZV".to_string(),
                customer_address: "14 Market Road, Pune".to_string(),
                customer_state: "Maharashtra".to_string(),
                customer_code: "27".to_string(),
                customer_contact: "9822000000".to_string(),
                customer_type: CustomerType::BillTo,
                buyer_name: String::new(),
                buyer_address: String::new(),
                buyer_gst: String::new(),
                buyer_state: String::new(),
                buyer_code: String::new(),
                buyer_contact: String::new(),
                place_of_supply: "Maharashtra".to_string(),
                transaction_type: TransactionType::Intrastate,
                gst_percent: "18".to_string(),
                items: vec![LineItem::new("Hex Bolt M8", "7318", "2", "NOS", "100")],
                timestamp: 1_700_000_000_000,
            },
        }
    }

    pub fn invoice_no(mut self, invoice_no: &str) -> Self {
        self.bill.invoice_no = invoice_no.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.bill.date = date.to_string();
        self
    }

    pub fn customer(mut self, name: &str, gst: &str) -> Self {
        self.bill.customer_name = name.to_string();
        self.bill.customer_gst = gst.to_string();
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.bill.transaction_type = transaction_type;
        self
    }

    pub fn gst_percent(mut self, gst_percent: &str) -> Self {
        self.bill.gst_percent = gst_percent.to_string();
        self
    }

    pub fn items(mut self, items: Vec<LineItem>) -> Self {
        self.bill.items = items;
        self
    }

    pub fn item(mut self, desc: &str, hsn: &str, qty: &str, rate: &str) -> Self {
        self.bill.items.push(LineItem::new(desc, hsn, qty, "NOS", rate));
        self
    }

    pub fn build(self) -> Bill {
        self.bill
    }
}

/// Builds [`Payment`] records
#[derive(Debug, Clone)]
pub struct PaymentBuilder {
    payment: Payment,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            payment: Payment {
                id: None,
                customer_id: None,
                customer_name: "Acme Traders".to_string(),
                customer_gstin: "27AAEPM1234C1ZV".to_string(),
                date: "2024-04-15".to_string(),
                method: "cash".to_string(),
                amount: dec!(500),
                notes: String::new(),
                timestamp: 1_700_000_000_000,
            },
        }
    }

    pub fn customer(mut self, name: &str, gstin: &str) -> Self {
        self.payment.customer_name = name.to_string();
        self.payment.customer_gstin = gstin.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.payment.date = date.to_string();
        self
    }

    pub fn method(mut self, method: &str) -> Self {
        self.payment.method = method.to_string();
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.payment.amount = amount;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.payment.notes = notes.to_string();
        self
    }

    pub fn build(self) -> Payment {
        self.payment
    }
}

/// Builds [`Customer`] records
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    customer: Customer,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            customer: Customer {
                id: None,
                name: "Acme Traders".to_string(),
                address: "14 Market Road, Pune".to_string(),
                gstin: "27AAEPM1234C1ZV".to_string(),
                state: "Maharashtra".to_string(),
                state_code: "27".to_string(),
                contact: "9822000000".to_string(),
                timestamp: 1_700_000_000_000,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.customer.name = name.to_string();
        self
    }

    pub fn gstin(mut self, gstin: &str) -> Self {
        self.customer.gstin = gstin.to_string();
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }
}
