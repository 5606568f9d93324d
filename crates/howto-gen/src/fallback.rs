//! The built-in tutorial template, rendered whenever no backend is
//! configured or a backend request fails.

/// Lowercase the query and drop a leading "how to ":
/// "How to fold a fitted sheet" becomes "fold a fitted sheet".
pub fn clean_phrase(query: &str) -> String {
    let lowered = query.to_lowercase();
    lowered
        .strip_prefix("how to ")
        .unwrap_or(&lowered)
        .to_string()
}

/// The cleaned phrase with its first letter capitalized, as used in the
/// template heading: "fold a fitted sheet" becomes "Fold a fitted sheet".
pub fn display_phrase(query: &str) -> String {
    let clean = clean_phrase(query);
    let mut chars = clean.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the generic tutorial template for a query. The shape matches
/// backend output: h1 title, intro, Step-by-Step Instructions, Pro Tips
/// & Best Practices, Common Mistakes to Avoid, Conclusion.
pub fn fallback_markup(query: &str) -> String {
    let clean = clean_phrase(query);
    let capitalized = display_phrase(query);

    format!(
        r#"<h1>How to {capitalized}</h1>
<p>Master the art of {clean} with this comprehensive step-by-step guide. This essential skill can transform your daily routine and boost your confidence. Our expert-crafted instructions will help you achieve professional results every time.</p>

<h2>Step-by-Step Instructions</h2>
<ol>
  <li><strong>Prepare your workspace:</strong> Gather all necessary materials and tools. Ensure you have a clean, well-lit area with adequate room to work comfortably. Organization at this stage prevents mistakes later.</li>
  <li><strong>Master the fundamentals:</strong> Begin with the foundational technique. Take time to understand the basic principles and practice the core movements before advancing to complex steps.</li>
  <li><strong>Execute the main technique:</strong> Apply the primary method systematically, following each step in sequence. Pay close attention to detail and maintain consistency throughout the entire process.</li>
  <li><strong>Monitor and adjust:</strong> Regularly check your progress and make small adjustments as needed. This ensures you stay on track and achieve the desired outcome.</li>
  <li><strong>Apply finishing touches:</strong> Complete the final steps with precision and care. These finishing details often distinguish amateur results from professional-quality work.</li>
  <li><strong>Review and perfect:</strong> Evaluate your results and identify areas for improvement. Practice regularly to develop muscle memory and refine your technique over time.</li>
</ol>

<h2>Pro Tips &amp; Best Practices</h2>
<ul>
  <li><strong>Quality over speed:</strong> Take your time and focus on proper technique rather than rushing through the process. Precision leads to better results.</li>
  <li><strong>Practice consistently:</strong> Regular practice builds muscle memory and improves your skills exponentially. Set aside dedicated time for improvement.</li>
  <li><strong>Use quality tools:</strong> Invest in good materials and equipment when possible. Quality tools make a significant difference in the final outcome.</li>
  <li><strong>Learn from experts:</strong> Study techniques used by professionals and incorporate their methods into your own practice routine.</li>
  <li><strong>Document your progress:</strong> Keep track of what works and what doesn't. This helps you refine your approach over time.</li>
</ul>

<h2>Common Mistakes to Avoid</h2>
<ul>
  <li><strong>Skipping preparation:</strong> Rushing into the main steps without proper setup often leads to preventable errors and subpar results.</li>
  <li><strong>Ignoring safety measures:</strong> Always prioritize safety and follow recommended precautions to prevent accidents or damage.</li>
  <li><strong>Not following the sequence:</strong> Each step builds on the previous one. Skipping or rearranging steps can compromise the entire process.</li>
  <li><strong>Using poor quality materials:</strong> Cheap or inappropriate materials can sabotage even perfect technique and waste your time and effort.</li>
  <li><strong>Getting discouraged by mistakes:</strong> Every expert was once a beginner. Learn from errors rather than letting them discourage continued practice.</li>
</ul>

<h2>Conclusion</h2>
<p>Mastering how to {clean} requires patience, practice, and attention to detail. By following these comprehensive instructions and avoiding common pitfalls, you'll develop the confidence and skills needed to achieve professional results. Remember that expertise comes through consistent practice and a willingness to learn from each attempt. Start practicing today and watch your skills improve with each session.</p>"#
    )
}
