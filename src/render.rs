use crate::view::PageContext;

pub fn render_index(context: &PageContext) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Visit counter</title></head>\n\
         <body>\n\
         <h1>Number of visits: {}</h1>\n\
         </body>\n\
         </html>\n",
        context.visit_counter.count
    )
}

#[cfg(test)]
mod test {
    use super::render_index;
    use crate::model::VisitCounter;
    use crate::view::PageContext;

    #[test]
    fn test_render_index() {
        let context = PageContext {
            visit_counter: VisitCounter { id: 1, count: 12 },
        };
        let html = render_index(&context);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Number of visits: 12</h1>"));
    }
}
