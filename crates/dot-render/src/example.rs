/// Small flowchart used as a starting point for new diagrams
pub const EXAMPLE_FLOWCHART: &str = r#"digraph G {
  rankdir=LR;
  node [shape=box];
  start [shape=oval];
  end [shape=oval];

  start -> process1;
  process1 -> decision1 [label="continue"];
  decision1 -> process2 [label="yes"];
  decision1 -> end [label="no"];
  process2 -> end;
}
"#;
