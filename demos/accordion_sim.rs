use std::collections::HashMap;

use accordion_vm::{
    Accordion, AccordionEvent, AccordionOptions, Bounds, ClickEvent, Display, Dom, EventKind,
};

// A page with a fixed header and a FAQ list: anchors are 48px tall, answers vary.
#[derive(Debug, Default)]
struct Page {
    // (class, natural height)
    elements: Vec<(&'static str, f32)>,
    attrs: HashMap<(usize, String), String>,
    heights: HashMap<usize, f32>,
    display: HashMap<usize, Display>,
    scroll_top: f32,
}

const ROOT: usize = 0;

impl Page {
    fn faq(answers: &[f32]) -> Self {
        let mut page = Page::default();
        page.elements.push(("root", 0.0));
        for &h in answers {
            page.elements.push(("faq_question", 48.0));
            page.elements.push(("faq_answer", h));
        }
        page
    }

    fn height(&self, i: usize) -> f32 {
        let (class, natural) = self.elements[i];
        if class != "faq_answer" {
            return natural;
        }
        let shown = match self.display.get(&i) {
            Some(Display::None) => false,
            Some(Display::Block) => true,
            None => self.attr(&i, "aria-expanded").as_deref() == Some("true"),
        };
        if shown {
            self.heights.get(&i).copied().unwrap_or(natural)
        } else {
            0.0
        }
    }
}

impl Dom for Page {
    type Node = usize;

    fn query_all(&self, _scope: &usize, selector: &str) -> Vec<usize> {
        (0..self.elements.len())
            .filter(|&i| self.elements[i].0 == selector)
            .collect()
    }

    fn attr(&self, node: &usize, name: &str) -> Option<String> {
        self.attrs.get(&(*node, name.to_string())).cloned()
    }

    fn set_attr(&mut self, node: &usize, name: &str, value: &str) {
        self.attrs.insert((*node, name.to_string()), value.to_string());
    }

    fn set_display(&mut self, node: &usize, display: Option<Display>) {
        match display {
            Some(d) => self.display.insert(*node, d),
            None => self.display.remove(node),
        };
    }

    fn set_height(&mut self, node: &usize, height: Option<f32>) {
        match height {
            Some(h) => self.heights.insert(*node, h),
            None => self.heights.remove(node),
        };
    }

    fn set_z_index(&mut self, _node: &usize, _z_index: Option<i32>) {}

    fn content_height(&self, node: &usize) -> f32 {
        self.height(*node)
    }

    fn bounds(&self, node: &usize) -> Bounds {
        if *node == ROOT {
            return Bounds::new(0.0, 0.0, 800.0, f32::MAX);
        }
        let top = 64.0 + (1..*node).map(|i| self.height(i)).sum::<f32>();
        Bounds::new(0.0, top, 800.0, self.height(*node))
    }

    fn viewport(&self, _container: &usize) -> Bounds {
        Bounds::new(0.0, self.scroll_top, 800.0, 700.0)
    }

    fn scroll_top(&self, _container: &usize) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, _container: &usize, top: f32) {
        self.scroll_top = top;
    }

    fn default_scroll_container(&self) -> usize {
        ROOT
    }

    fn dispatch_scroll(&mut self) {}
}

fn main() {
    // An adapter would:
    // - forward anchor clicks to `click`
    // - call tick(now_ms) from requestAnimationFrame while it returns true
    // - let its Dom impl write attributes/styles to real elements
    let options = AccordionOptions::new("faq_question", "faq_answer")
        .with_attrs("aria-selected", "aria-expanded")
        // Keep anchors clear of the 64px fixed header.
        .with_scroll_offset_value(-64.0);
    let mut acc = Accordion::new(Page::faq(&[900.0, 240.0, 120.0]), ROOT, options)
        .expect("valid accordion markup");
    for kind in EventKind::ALL {
        acc.controller_mut().on(kind, |e: AccordionEvent| println!("  event {e:?}"));
    }

    let questions = acc.controller().dom().query_all(&ROOT, "faq_question");
    let mut now_ms = 0u64;

    println!("open the long first answer");
    acc.click(&ClickEvent::primary(questions[0])).unwrap();
    while acc.tick(now_ms) {
        now_ms += 16;
    }

    println!("read down to the end of it, then open the second question");
    acc.controller_mut().dom_mut().scroll_top = 800.0;
    acc.click(&ClickEvent::primary(questions[1])).unwrap();
    while acc.tick(now_ms) {
        if now_ms % 160 == 0 {
            println!("  t={now_ms} scroll_top={:.1}", acc.controller().dom().scroll_top);
        }
        now_ms += 16;
    }

    println!(
        "done: opened={:?} scroll_top={}",
        acc.controller().opened_index(),
        acc.controller().dom().scroll_top
    );
}
