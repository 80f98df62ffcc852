//! Keyword tables for Spark SQL, one phrase per line.

pub(crate) const SPARK_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
ALTER COLUMN
ALTER TABLE
CLUSTER BY
DISTRIBUTE BY
FROM
GROUP BY
HAVING
INSERT INTO
INSERT OVERWRITE
INSERT
LIMIT
ORDER BY
PIVOT
SELECT
SET
SORT BY
UNPIVOT
UPDATE
VALUES
WHERE
WINDOW
";

pub(crate) const SPARK_RESERVED_NEWLINE_KEYWORDS: &str = "AND
ANTI JOIN
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LATERAL VIEW
LEFT ANTI JOIN
LEFT JOIN
LEFT OUTER JOIN
LEFT SEMI JOIN
NATURAL JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
RIGHT SEMI JOIN
SEMI JOIN
WHEN
XOR
";

pub(crate) const SPARK_RESERVED_KEYWORDS: &str = "ALL
AS
ASC
BETWEEN
BOTH
BY
CAST
COLLECTION ITEMS
CREATE
CROSS
CUBE
CURRENT ROW
CURRENT
DATABASE
DEFAULT
DELETE
DESC
DESCRIBE
DISTINCT
DROP
ESCAPE
EXISTS
EXPLAIN
EXTERNAL
FALSE
FILTER
FIRST
FOLLOWING
FOR
FOREIGN KEY
GLOBAL
GRANT
GROUPING SETS
IF
IGNORE NULLS
IN
INTERVAL
INTO
IS
LAST
LATERAL
LEADING
LIKE
LOCATION
NATURAL
NOT
NULL
NULLS
OF
ON
ONLY
ORDER
OUTER
OVER
OVERWRITE
PARTITION BY
PARTITIONED BY
PRECEDING
PRIMARY KEY
RANGE
RESPECT NULLS
RLIKE
ROLLUP
ROW
ROWS
SHOW
SOME
STORED AS
TABLE
TABLESAMPLE
TBLPROPERTIES
TEMPORARY
THEN
TO
TRAILING
TRUE
UNBOUNDED
USE
USING
VIEW
WITH
";
